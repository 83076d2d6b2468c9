use std::fmt::Debug;
use std::mem;

/// Transaction over some input `T`.
///
/// A transaction either commits, yielding its output, or aborts, yielding its
/// input back. Aborting must undo any changes made since the transaction began.
pub trait Transact<T = ()>: Sized {
    type Output;
    type Error: Debug;

    fn commit(self) -> Result<Self::Output, Self::Error>;

    fn commit_with<F, U, E>(mut self, f: F) -> Result<(Self::Output, U), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<U, E>,
        E: Into<Self::Error>,
    {
        match f(&mut self) {
            Ok(value) => self.commit().map(|output| (output, value)),
            Err(error) => {
                self.abort();
                Err(error.into())
            }
        }
    }

    fn abort(self) -> T;
}

pub trait TransactFrom<T>: From<T> + Transact<T> {}

impl<T, U> TransactFrom<U> for T where T: From<U> + Transact<U> {}

pub trait Mutate<T>: Transact<T, Output = T> {
    fn replace(target: &mut T, replacement: T) -> Replace<T, Self>
    where
        Self: TransactFrom<T>,
    {
        Replace::replace(target, replacement)
    }
}

impl<T, U> Mutate<U> for T where T: Transact<U, Output = U> {}

trait Drain<T> {
    fn as_option_mut(&mut self) -> &mut Option<T>;

    fn drain(&mut self) -> T {
        self.as_option_mut().take().expect("drained")
    }
}

/// Transaction that moves a value out of a mutable reference.
///
/// The target holds the replacement while the transaction is pending. Commit
/// writes the mutated value back into the target. Abort, including an implicit
/// abort when a pending `Replace` is dropped, writes the restored input back
/// into the target instead.
pub struct Replace<'a, T, M>
where
    M: Mutate<T> + TransactFrom<T>,
{
    inner: Option<(&'a mut T, M)>,
}

impl<'a, T, M> Replace<'a, T, M>
where
    M: Mutate<T> + TransactFrom<T>,
{
    pub fn replace(target: &'a mut T, replacement: T) -> Self {
        let mutant = mem::replace(target, replacement);
        Replace {
            inner: Some((target, M::from(mutant))),
        }
    }

    fn drain_and_commit(&mut self) -> Result<&'a mut T, <Self as Transact<&'a mut T>>::Error> {
        let (target, inner) = self.drain();
        let mutant = inner.commit()?;
        *target = mutant;
        Ok(target)
    }

    fn drain_and_abort(&mut self) -> &'a mut T {
        let (target, inner) = self.drain();
        *target = inner.abort();
        target
    }
}

impl<'a, T, M> AsMut<M> for Replace<'a, T, M>
where
    M: Mutate<T> + TransactFrom<T>,
{
    fn as_mut(&mut self) -> &mut M {
        &mut self.inner.as_mut().unwrap().1
    }
}

impl<'a, T, M> Drain<(&'a mut T, M)> for Replace<'a, T, M>
where
    M: Mutate<T> + TransactFrom<T>,
{
    fn as_option_mut(&mut self) -> &mut Option<(&'a mut T, M)> {
        &mut self.inner
    }
}

impl<'a, T, M> Drop for Replace<'a, T, M>
where
    M: Mutate<T> + TransactFrom<T>,
{
    fn drop(&mut self) {
        if self.inner.is_some() {
            self.drain_and_abort();
        }
    }
}

impl<'a, T, M> Transact<&'a mut T> for Replace<'a, T, M>
where
    M: Mutate<T> + TransactFrom<T>,
{
    type Output = &'a mut T;
    type Error = <M as Transact<T>>::Error;

    fn commit(mut self) -> Result<Self::Output, Self::Error> {
        let mutant = self.drain_and_commit();
        mem::forget(self);
        mutant
    }

    fn abort(mut self) -> &'a mut T {
        let target = self.drain_and_abort();
        mem::forget(self);
        target
    }
}

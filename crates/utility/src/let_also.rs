/// Pipeline helper to apply a function to an owned value mid-chain.
pub trait LetAlso: Sized {
    fn let_owned<R, F: FnOnce(Self) -> R>(self, f: F) -> R {
        f(self)
    }
}

impl<T: Sized> LetAlso for T {}

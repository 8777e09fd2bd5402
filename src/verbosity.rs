use log::LevelFilter;
use num_traits::PrimInt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verbosity {
    None,
    Some,
    Very,
}

impl<X> From<X> for Verbosity
where
    X: PrimInt,
{
    fn from(value: X) -> Self {
        if value < X::one() {
            Verbosity::None
        } else if value < X::one() + X::one() {
            Verbosity::Some
        } else {
            Verbosity::Very
        }
    }
}

impl Verbosity {
    /// The log level used when `RUST_LOG` is not set.
    pub fn level_filter(self) -> LevelFilter {
        match self {
            Verbosity::None => LevelFilter::Warn,
            Verbosity::Some => LevelFilter::Info,
            Verbosity::Very => LevelFilter::Debug,
        }
    }
}

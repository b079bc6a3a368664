/// Adds a `new` constructor to a `String` newtype token.
#[macro_export]
macro_rules! impl_token_newtype {
    ($name:ty) => {
        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }
        }
    };
}

use serde::{Deserialize, Serialize};

macro_rules! id {
    ($($id:ident),*$(,)?) => {
        $(
            #[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
            #[serde(transparent)]
            #[repr(transparent)]
            pub struct $id(i64);

            impl $id {
                pub const fn get(self) -> i64 {
                    self.0
                }
            }

            impl From<i64> for $id {
                fn from(value: i64) -> Self {
                    Self(value)
                }
            }

            impl ::std::fmt::Display for $id {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    self.0.fmt(f)
                }
            }
        )*
    };
}

id![AlbumId, PhotoId, UserId];

use serde::{Deserialize, Serialize};
use shared::error::AppError;
use std::{fmt, str::FromStr};

// コレクションごとの連番 ID。採番は保存先が「最大値 + 1」で行う
macro_rules! define_id {
    ($id_type: ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $id_type(i64);

        impl $id_type {
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            pub const fn raw(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $id_type {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl FromStr for $id_type {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i64>().map(Self).map_err(|e| {
                    AppError::ConversionEntityError(format!(
                        "{} is not a valid {}: {e}",
                        s,
                        stringify!($id_type)
                    ))
                })
            }
        }

        impl fmt::Display for $id_type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId);
define_id!(SiteId);
define_id!(RoomId);
define_id!(ResourceId);
define_id!(RoomResourceId);
define_id!(ReservationId);

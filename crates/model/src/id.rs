//! Server-assigned identifiers. Each entity gets its own type so that a
//! question ID can never be passed where an option ID is expected.

use core::fmt::{self, Display};
use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from($name(raw): $name) -> Self {
                raw
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }
    };
}

define_id!(
    /// Identifier of a [`Survey`](crate::Survey).
    SurveyId
);
define_id!(
    /// Identifier of a [`Question`](crate::Question).
    QuestionId
);
define_id!(
    /// Identifier of a [`Choice`](crate::Choice).
    OptionId
);

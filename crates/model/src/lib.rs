#![cfg_attr(not(test), no_std)]
extern crate alloc;

pub mod ack;
pub mod id;
pub mod image;
pub mod result;
pub mod survey;

pub use ack::{Ack, Vote};
pub use id::{OptionId, QuestionId, SurveyId};
pub use image::Image;
pub use result::{OptionResult, SurveyResult};
pub use survey::{Choice, Question, Survey};

use alloc::vec::Vec;
use serde::{Deserialize, Deserializer};

/// Some backends send `null` in place of an empty list.
fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let maybe = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(maybe.unwrap_or_default())
}

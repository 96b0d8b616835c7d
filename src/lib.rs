//! Statistics driving ID3 attribute selection: label entropy, average information of an
//! attribute, information gain, and the choice of the attribute to split on.
//!
//! ```
//! use rid3::{select_attribute, Dataset};
//!
//! let data = Dataset::from_rows(vec![
//!     vec![0., 0., 0.],
//!     vec![0., 1., 0.],
//!     vec![1., 0., 1.],
//!     vec![1., 1., 1.],
//! ])?;
//! let (gains, attribute) = select_attribute(&data.view())?;
//! assert_eq!(attribute, 0);
//! assert_eq!(gains.get(0), Some(1.));
//! # Ok::<(), rid3::Id3Error>(())
//! ```

mod data;
mod entropy;
mod error;
mod gain;
mod math;
mod matrix;
mod selector;

pub use crate::data::*;
pub use crate::entropy::*;
pub use crate::error::*;
pub use crate::gain::{average_info, information_gain, information_gain_rounded};
pub use crate::math::*;
pub use crate::matrix::*;
pub use crate::selector::*;

pub(crate) static DEFAULT_DECIMALS: i32 = 4;
pub(crate) static MAX_DECIMALS: i32 = 15;
pub(crate) static DEFAULT_PARALLEL: bool = false;

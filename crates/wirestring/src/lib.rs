//! A mutable, growable byte string buffer for memory-constrained targets.
//!
//! [`WireString`] keeps short strings in a 16-byte array embedded in the value
//! itself and only touches the heap once content outgrows it. Every value is
//! NUL-terminated at all times, so the content can be handed to C-style
//! consumers without copying. Growth is fallible and reported by value; an
//! allocation shortfall never unwinds.
//!
//! ```rust
//! use wirestring::WireString;
//!
//! let mut s = WireString::from("temp: ");
//! s.concat(21.5f32);
//! assert_eq!(s, "temp: 21.50");
//! assert!(s.is_inline());
//! ```
//!
//! Sources that live in a read-only address space (program memory on
//! Harvard-architecture parts) are represented by [`FlashStr`] and reach the
//! buffer only through its block-copy and byte-read primitives:
//!
//! ```rust
//! use wirestring::{WireString, flash_str};
//!
//! let banner = flash_str!("boot ok");
//! let s = WireString::from_flash(banner);
//! assert_eq!(s, "boot ok");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod edit;
mod error;
mod flash;
mod numbers;
mod ops;
mod repr;
mod search;
mod string;

#[cfg(test)]
mod tests;

pub use error::ReserveError;
pub use flash::FlashStr;
pub use repr::{CAPACITY_MAX, INLINE_CAPACITY};
pub use string::{Concat, WireString};

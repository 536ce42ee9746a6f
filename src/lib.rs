//! A lossless codec between a full chess position and a fixed 24-byte binary
//! representation.
//!
//! Storing large corpora of chess positions as FEN strings is wasteful: a FEN
//! averages around 60 bytes and carries redundant structure. `fenpack` packs
//! everything needed to reconstruct a position exactly (piece placement, side
//! to move, castling eligibility and the en-passant target) into 24 bytes,
//! always.
//!
//! # Format
//!
//! The packed form is a 64-bit occupancy bitmap (bytes 0-7, rank 8 first)
//! followed by one 4-bit piece code per occupied square (bytes 8-23, two codes
//! per byte). Auxiliary game state is folded into otherwise-unused code space:
//! a pawn that just advanced two squares, a castling-eligible rook and the
//! "black to move" marker on the black king each get their own code instead of
//! a separate field. See the [`codec`] module for the full layout.
//!
//! # Usage
//!
//! ```
//! use fenpack::{Position, encode, decode};
//!
//! let pos = Position::start_pos();
//! let packed = encode(&pos).unwrap();
//! assert_eq!(packed.len(), 24);
//!
//! let back = decode(&packed).unwrap();
//! assert_eq!(back, pos);
//! ```
//!
//! Round-tripping through FEN works as well:
//!
//! ```
//! use fenpack::{Position, encode, decode};
//!
//! let pos = Position::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
//! let packed = encode(&pos).unwrap();
//! assert_eq!(decode(&packed).unwrap().fen(), pos.fen());
//! ```
//!
//! [`codec`]: codec/index.html

#![allow(dead_code)]

#[macro_use]
extern crate bitflags;
extern crate failure;
#[macro_use]
extern crate failure_derive;
extern crate rand;

pub mod codec;
pub mod core;
pub mod position;
pub mod tools;

#[doc(no_inline)]
pub use codec::piece_code::PieceCode;
#[doc(no_inline)]
pub use codec::{decode, encode, PackError, PACKED_BYTES};
#[doc(no_inline)]
pub use core::bitboard::BitBoard;
#[doc(no_inline)]
pub use core::sq::SQ;
#[doc(no_inline)]
pub use core::{File, PieceType, Player, Rank};
#[doc(no_inline)]
pub use position::Position;

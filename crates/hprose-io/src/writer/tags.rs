// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hprose wire tags.

// Scalars
pub const TAG_INTEGER: u8 = b'i';
pub const TAG_LONG: u8 = b'l';
pub const TAG_DOUBLE: u8 = b'd';
pub const TAG_NULL: u8 = b'n';
pub const TAG_EMPTY: u8 = b'e';
pub const TAG_TRUE: u8 = b't';
pub const TAG_FALSE: u8 = b'f';
pub const TAG_NAN: u8 = b'N';
pub const TAG_INFINITY: u8 = b'I';
pub const TAG_POS: u8 = b'+';
pub const TAG_NEG: u8 = b'-';

// Date/time
pub const TAG_DATE: u8 = b'D';
pub const TAG_TIME: u8 = b'T';
pub const TAG_UTC: u8 = b'Z';
pub const TAG_POINT: u8 = b'.';

// Strings and binaries
pub const TAG_BYTES: u8 = b'b';
pub const TAG_UTF8_CHAR: u8 = b'u';
pub const TAG_STRING: u8 = b's';
pub const TAG_GUID: u8 = b'g';

// Containers and objects
pub const TAG_LIST: u8 = b'a';
pub const TAG_MAP: u8 = b'm';
pub const TAG_CLASS: u8 = b'c';
pub const TAG_OBJECT: u8 = b'o';

// Delimiters
pub const TAG_SEMICOLON: u8 = b';';
pub const TAG_OPENBRACE: u8 = b'{';
pub const TAG_CLOSEBRACE: u8 = b'}';
pub const TAG_QUOTE: u8 = b'"';

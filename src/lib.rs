// Copyright 2019 Arnau Siches
//
// Licensed under the MIT license <LICENSE or http://opensource.org/licenses/MIT>.
// This file may not be copied, modified, or distributed except
// according to those terms.

#[macro_use]
extern crate failure;

extern crate percent_encoding;
extern crate url;

pub mod attribute;
pub mod error;
pub mod link;
pub mod uri;

pub use attribute::Value;
pub use error::LinkError;
pub use link::Link;
pub use uri::UriRef;

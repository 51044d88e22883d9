//! Library half of quill-cli, shared by the binary and its tests.

pub mod transforms;

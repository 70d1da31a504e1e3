#![allow(missing_docs)]

mod catalogue;

const fn main() {}

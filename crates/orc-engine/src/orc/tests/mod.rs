mod common;
mod variants;

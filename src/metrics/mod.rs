pub mod sad;

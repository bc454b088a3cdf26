pub mod navigator;

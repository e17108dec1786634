pub mod alpha_scale;

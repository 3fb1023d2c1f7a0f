pub mod round_image;

mod debug;
mod display;
mod into_iter;

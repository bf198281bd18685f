extern crate nalgebra as na;

mod line_partition;

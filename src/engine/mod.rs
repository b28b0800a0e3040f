pub mod rfs;

pub mod cloud_build;

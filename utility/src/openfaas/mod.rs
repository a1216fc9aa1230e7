pub mod faas;

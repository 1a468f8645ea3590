pub mod xroad;

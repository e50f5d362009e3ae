pub mod maxipago;

pub use self::maxipago::Maxipago;

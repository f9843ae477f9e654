pub mod cmd;
pub mod io;

use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

/// Shared line sink that concrete observers and strategies write to.
pub type SharedOutput = Rc<RefCell<dyn Write>>;

pub fn stdout() -> SharedOutput {
    Rc::new(RefCell::new(io::stdout()))
}

/// Writes one line and flushes, so interleaving with other sinks stays readable.
pub fn write_line(output: &SharedOutput, line: &str) -> io::Result<()> {
    let mut out = output.borrow_mut();
    writeln!(out, "{line}")?;
    out.flush()
}

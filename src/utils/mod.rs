pub mod due_date;

pub use due_date::assemble_due_date;

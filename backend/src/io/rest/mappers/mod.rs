pub mod todo_mapper;

pub use todo_mapper::TodoMapper;

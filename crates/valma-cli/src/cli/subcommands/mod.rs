mod page;

pub use page::PageCommands;

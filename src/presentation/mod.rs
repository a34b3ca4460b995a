// Presentation layer - display slots and the console front end
pub mod console;
pub mod page;

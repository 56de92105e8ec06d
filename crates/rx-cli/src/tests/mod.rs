mod cli;
mod form;

pub mod tradesim;

pub mod dentist;

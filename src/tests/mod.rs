mod common;

mod report_accessors;

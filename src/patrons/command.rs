pub mod get_patron_report_cmd;

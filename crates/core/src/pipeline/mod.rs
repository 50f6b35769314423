pub mod transcribe_use_case;

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use clap::Parser;
    use tempfile::NamedTempFile;
    use unixtools_cli::arguments::{Provider, Request};
    use unixtools_cli::cli_args::Args;
    use unixtools_cli::dispatch::run;
    use unixtools_core::error::Error;

    fn run_args(args: &[&str], stdin: &str) -> (Result<(), Error>, String) {
        let request = Args::parse_from(args).get_request();
        let mut reader = Cursor::new(stdin.to_string());
        let mut writer = Vec::new();
        let result = run(&request, &mut reader, &mut writer);
        (result, String::from_utf8(writer).unwrap())
    }

    fn five_line_file() -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "Line 1\nLine 2\nLine 3\nLine 4\nLine 5").unwrap();
        temp_file
    }

    #[test]
    fn test_cut_from_prompt() {
        let (result, output) = run_args(
            &["unixtools", "cut", "-d", ",", "-F", "1", "3"],
            "apple,banana,orange\n",
        );
        assert!(result.is_ok());
        assert_eq!(output, "Enter text: apple,orange\n");
    }

    #[test]
    fn test_cut_default_tab_delimiter() {
        let (result, output) = run_args(&["unixtools", "cut", "-F", "2-3"], "a\tb\tc\td\n");
        assert!(result.is_ok());
        assert_eq!(output, "Enter text: b\tc\n");
    }

    #[test]
    fn test_cut_without_fields_prints_guidance() {
        let (result, output) = run_args(&["unixtools", "cut"], "never read\n");
        assert!(result.is_ok());
        assert_eq!(output, "Please specify fields to cut.\n");
    }

    #[test]
    fn test_cut_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "apple,banana,orange\n1,2,3\nx,y,z").unwrap();
        let path = temp_file.path().to_str().unwrap();

        let (result, output) = run_args(&["unixtools", "cut", "-d", ",", "-F", "1", "-f", path], "");
        assert!(result.is_ok());
        assert_eq!(output, "apple\n1\nx\n");
    }

    #[test]
    fn test_cut_malformed_selector_before_prompt() {
        let (result, output) = run_args(&["unixtools", "cut", "-F", "a-b"], "x\n");
        assert!(matches!(result, Err(Error::MalformedSelector(_))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_cut_index_out_of_range() {
        let (result, _) = run_args(&["unixtools", "cut", "-d", ",", "-F", "5"], "a,b\n");
        assert!(matches!(result, Err(Error::FieldIndexOutOfRange { .. })));
    }

    #[test]
    fn test_cut_end_of_input() {
        let (result, _) = run_args(&["unixtools", "cut", "-F", "1"], "");
        assert!(matches!(result, Err(Error::EndOfInput)));
    }

    #[test]
    fn test_wc_from_prompt() {
        let (result, output) = run_args(&["unixtools", "wc"], "Hello, how are you?\n");
        assert!(result.is_ok());
        assert_eq!(output, "Enter text: Lines: 1, Words: 4, Characters: 19\n");
    }

    #[test]
    fn test_wc_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "Hello, how are you?\nI am doing well, thank you.").unwrap();
        let path = temp_file.path().to_str().unwrap();

        let (result, output) = run_args(&["unixtools", "wc", "--file", path], "");
        assert!(result.is_ok());
        assert_eq!(output, "Lines: 2, Words: 10, Characters: 46\n");
    }

    #[test]
    fn test_extract_lines() {
        let temp_file = five_line_file();
        let path = temp_file.path().to_str().unwrap();

        let (result, output) = run_args(&["unixtools", "extract", "-f", path, "-i", "2", "-o", "4"], "");
        assert!(result.is_ok());
        assert_eq!(output, "Line 2\nLine 3\nLine 4\n\n");
    }

    #[test]
    fn test_extract_invalid_numbers_printed() {
        let temp_file = five_line_file();
        let path = temp_file.path().to_str().unwrap();

        let (result, output) = run_args(&["unixtools", "extract", "-f", path, "-i", "10", "-o", "12"], "");
        assert!(result.is_ok());
        assert_eq!(output, "Invalid line numbers provided.\n");
    }

    #[test]
    fn test_extract_inverted_printed() {
        let temp_file = five_line_file();
        let path = temp_file.path().to_str().unwrap();

        let (result, output) = run_args(&["unixtools", "extract", "-f", path, "-i", "4", "-o", "2"], "");
        assert!(result.is_ok());
        assert_eq!(
            output,
            "Input line number should be less than or equal to output line number.\n"
        );
    }

    #[test]
    fn test_extract_missing_file_printed() {
        let (result, output) = run_args(
            &["unixtools", "extract", "-f", "/nonexistent/path", "-i", "1", "-o", "1"],
            "",
        );
        assert!(result.is_ok());
        assert_eq!(output, "File not found.\n");
    }

    #[test]
    fn test_extract_missing_flags_prints_guidance() {
        let (result, output) = run_args(&["unixtools", "extract", "-f", "a.txt"], "");
        assert!(result.is_ok());
        assert_eq!(
            output,
            "Please specify file path, input line number, and output line number.\n"
        );
    }

    #[test]
    fn test_missing_arguments_request_runs_without_input() {
        let request = Request::MissingArguments("Please specify fields to cut.");
        let mut reader = Cursor::new(String::new());
        let mut writer = Vec::new();
        run(&request, &mut reader, &mut writer).unwrap();
        assert_eq!(writer, b"Please specify fields to cut.\n");
    }
}

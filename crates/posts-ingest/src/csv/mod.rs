mod reader;

pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_posts_csv,
    validate_dataframe_shape, validate_encoding,
};

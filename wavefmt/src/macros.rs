// Shorthand for return Err(WaveFmtError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(WaveFmtError::new(ErrorKind::Variant))
// - err!(Variant(Message)) -> return Err(WaveFmtError::new(ErrorKind::Variant(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::WaveFmtError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::WaveFmtError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

// Shorthand for FileDecodingError::new("Message")
//
// Usage:
//
// - decode_err!(Message)
//
// or bail:
//
// - decode_err!(@BAIL Message)
macro_rules! decode_err {
	($reason:literal) => {
		Into::<crate::error::WaveFmtError>::into(crate::error::FileDecodingError::new($reason))
	};
	(@BAIL $reason:literal) => {
		return Err(decode_err!($reason))
	};
}

// A macro for handling the different `ParsingMode`s
//
// NOTE: `STRICT` is required, `RELAXED` falls through to an empty block when missing.
//
// Usage:
//
// - parse_mode_choice!(
// 		ident_of_parsing_mode,
// 		STRICT: some_expr,
// 		RELAXED: some_expr,
// 	 )
macro_rules! parse_mode_choice {
	(
		$parse_mode:ident,
		STRICT: $strict_handler:expr,
		$(RELAXED: $relaxed_handler:expr $(,)?)?
	) => {
		match $parse_mode {
			crate::config::ParsingMode::Strict => { $strict_handler },
			$(crate::config::ParsingMode::Relaxed => { $relaxed_handler },)?
			#[allow(unreachable_patterns)]
			_ => {}
		}
	};
}

pub(crate) use {decode_err, err, parse_mode_choice};

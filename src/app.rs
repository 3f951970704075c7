use crate::{
    configuration::{Configuration, Input, Operation, Output},
    error::Error,
    logger::Logger,
    report::Report,
};
use base50::hex;
use std::{
    fs::File,
    io::{Read, Write},
};

fn read_input(configuration: &Configuration, stdin: &mut impl Read) -> Result<Vec<u8>, Error> {
    let mut input = Vec::new();
    match configuration.input() {
        Input::Arguments(arguments) => {
            let separator = if configuration.hex() { " " } else { "" };
            input.extend_from_slice(arguments.join(separator).as_bytes());
        }
        Input::Stdin => {
            stdin.read_to_end(&mut input).map_err(|err| Error::context("read input err", err))?;
        }
        Input::File(path) => {
            File::open(path)
                .and_then(|mut file| file.read_to_end(&mut input))
                .map_err(|err| Error::context("input file err", err))?;
        }
    }
    if configuration.hex() && configuration.operation() == Operation::Encode {
        return Ok(hex::decode(input)?);
    }
    Ok(input)
}

fn encode(configuration: &Configuration, input: &[u8], writer: &mut dyn Write, logger: &Logger) -> Result<(), Error> {
    let text = base50::encode(input);
    logger.info(format!("encoded {} bytes into {} characters", input.len(), text.len()));
    if configuration.json() {
        return Report::encoded(input.len(), &text).write(writer);
    }
    writeln!(writer, "{}", text)?;
    Ok(())
}

fn decode(configuration: &Configuration, input: &[u8], writer: &mut dyn Write, logger: &Logger) -> Result<(), Error> {
    let (bytes, error) = base50::decode_partial(input);
    match error {
        Some(error) => logger.warn(format!("{}, {} bytes decoded before it", error, bytes.len())),
        None => logger.info(format!("decoded {} characters into {} bytes", input.len(), bytes.len())),
    }
    if configuration.json() {
        Report::decoded(input.len(), &bytes, error).write(writer)?;
    } else if error.is_none() {
        if configuration.hex() {
            writer.write_all(hex::encode(&bytes).as_bytes())?;
        } else {
            writer.write_all(&bytes)?;
        }
    }
    match error {
        Some(error) => Err(error.into()),
        None => Ok(()),
    }
}

/// Reads the configured input, encodes or decodes it, and writes the result.
pub fn run(configuration: &Configuration, stdin: &mut impl Read, stdout: &mut impl Write, logger: &Logger) -> Result<(), Error> {
    let input = read_input(configuration, stdin)?;
    logger.debug(format!("read {} bytes of input", input.len()));

    let mut file;
    let writer: &mut dyn Write = match configuration.output() {
        Output::Stdout => stdout,
        Output::File(path) => {
            file = File::create(path).map_err(|err| Error::context("output file err", err))?;
            &mut file
        }
    };

    match configuration.operation() {
        Operation::Encode => encode(configuration, &input, writer, logger)?,
        Operation::Decode => decode(configuration, &input, writer, logger)?,
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{
        configuration::{Args, Configuration},
        logger::Logger,
    };
    use clap::Parser;
    use std::{fs, io::Write};
    use tempfile::{NamedTempFile, TempDir};

    fn run(args: &[&str], stdin: &[u8]) -> (Result<(), String>, Vec<u8>) {
        let args = match Args::try_parse_from(std::iter::once("base50").chain(args.iter().copied())) {
            Ok(args) => args,
            Err(err) => panic!("{}", err),
        };
        let configuration = Configuration::with_env(args, |_| None).unwrap();
        let mut stdin = stdin;
        let mut stdout = Vec::new();
        let result = super::run(&configuration, &mut stdin, &mut stdout, &Logger::new());
        (result.map_err(|err| err.message().to_string()), stdout)
    }

    #[test]
    fn encode_arguments() {
        assert_eq!(run(&["a"], b""), (Ok(()), b"1x.\n".to_vec()));
        assert_eq!(run(&["abc", "defg"], b""), (Ok(()), b"H1jP5eefyh\n".to_vec()));
        assert_eq!(run(&["abc defg"], b""), (Ok(()), b"H1jP205LN423.\n".to_vec()));
        assert_eq!(run(&["abcdefg"], b""), (Ok(()), b"H1jP5eefyh\n".to_vec()));
    }

    #[test]
    fn encode_hex() {
        assert_eq!(run(&["-x", "ff"], b""), (Ok(()), b"55.\n".to_vec()));
        assert_eq!(run(&["-x", "f"], b""), (Ok(()), b"J.\n".to_vec()));
        assert_eq!(run(&["-x", "dead", "beef"], b""), (Ok(()), b"ExkRR9.\n".to_vec()));
        assert_eq!(run(&["-x", "-i", "-"], b"00ff4210\n"), (Ok(()), b"02fqRr.\n".to_vec()));
        assert_eq!(
            run(&["-x", "xyz"], b""),
            (Err("hex input err: Invalid character 'x' at position 0".to_string()), vec![])
        );
    }

    #[test]
    fn decode_stdin() {
        assert_eq!(run(&["-d", "-i", "-"], b"H1jP5eefyh1x.\n"), (Ok(()), b"abcdefga".to_vec()));
        assert_eq!(run(&["-d", "-i", "-"], b"J2FgU_ZU1U3\n5z87wZ.\n"), (Ok(()), b"hello world".to_vec()));
    }

    #[test]
    fn decode_hex() {
        assert_eq!(run(&["-d", "-x", "1x."], b""), (Ok(()), b"61".to_vec()));
        assert_eq!(run(&["-d", "-x", "02fqRr."], b""), (Ok(()), b"00ff4210".to_vec()));
    }

    #[test]
    fn decode_invalid() {
        assert_eq!(
            run(&["-d", "1x.1O."], b""),
            (Err("decode input err: Invalid character 'O' at index 4".to_string()), vec![])
        );
        assert_eq!(
            run(&["-d", "56"], b""),
            (
                Err("decode input err: Invalid encoding at index 0: 0x100 (Eg. 56 should be 056)".to_string()),
                vec![]
            )
        );
    }

    #[test]
    fn json() {
        let (result, output) = run(&["--json", "a"], b"");
        assert_eq!(result, Ok(()));
        let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(report["operation"], "encode");
        assert_eq!(report["output"], "1x.");
        assert_eq!(report["error"], serde_json::Value::Null);

        let (result, output) = run(&["--json", "-d", "H1jP5eefyh1x.l"], b"");
        assert!(result.is_err());
        let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(report["operation"], "decode");
        assert_eq!(report["output"], "6162636465666761");
        assert_eq!(report["output_length"], 8);
        assert_eq!(report["error"]["index"], 13);
        assert_eq!(report["error"]["decoded"], 8);
    }

    #[test]
    fn files() {
        let mut input = NamedTempFile::new().unwrap();
        let bytes = (0u8..10).collect::<Vec<u8>>();
        input.write_all(&bytes).unwrap();
        let directory = TempDir::new().unwrap();
        let encoded = directory.path().join("encoded.txt");
        let decoded = directory.path().join("decoded.bin");

        let input_path = input.path().to_str().unwrap();
        let encoded_path = encoded.to_str().unwrap();
        let decoded_path = decoded.to_str().unwrap();

        assert_eq!(run(&["-i", input_path, "-o", encoded_path], b""), (Ok(()), vec![]));
        assert_eq!(fs::read_to_string(&encoded).unwrap(), "001Pw4LFyw3gK9.\n");

        assert_eq!(run(&["-d", "-i", encoded_path, "-o", decoded_path], b""), (Ok(()), vec![]));
        assert_eq!(fs::read(&decoded).unwrap(), bytes);
    }

    #[test]
    fn missing_file() {
        let directory = TempDir::new().unwrap();
        let missing = directory.path().join("missing");
        let (result, output) = run(&["-i", missing.to_str().unwrap()], b"");
        assert!(result.unwrap_err().starts_with("input file err: "));
        assert!(output.is_empty());
    }
}

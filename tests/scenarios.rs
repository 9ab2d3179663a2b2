use ripple::io::parse_signal;
use ripple::transforms::{convolve, first_derivative, moving_average, second_derivative};
use ripple::{Accumulator, Error, QuantizerSpec, Signal, Sinusoid, Waveform, dft};
use std::fs;
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("ripple-{}-{}", std::process::id(), name));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_file_with_metadata_header() {
    let path = temp_file("meta.txt", "meta\nmeta\n3\n0 5\n1 -2\n2 7\n");
    let signal = ripple::read_signal(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(signal.indices(), &[0, 1, 2]);
    assert_eq!(signal.values(), &[5.0, -2.0, 7.0]);
}

#[test]
fn test_malformed_file_yields_no_signal() {
    let path = temp_file("short.txt", "0\n0\n4\n0 1\n1 2\n");
    let result = ripple::read_signal(&path);
    fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(Error::Format { .. })));
}

#[test]
fn test_accumulate_two_signals() {
    let mut acc = Accumulator::new();
    acc.add(&Signal::from_pairs(vec![0, 1], vec![2.0, 3.0]).unwrap());
    acc.add(&Signal::from_pairs(vec![1, 2], vec![10.0, 20.0]).unwrap());

    assert_eq!(acc.signal().indices(), &[0, 1, 2]);
    assert_eq!(acc.signal().values(), &[2.0, 13.0, 20.0]);
}

#[test]
fn test_classroom_session() {
    // Two files with negative and overlapping indices, as handed out in class
    let first = parse_signal("0\n0\n4\n-4 -2\n-3 3\n-2 0\n-1 1\n".as_bytes()).unwrap();
    let second = parse_signal("0\n0\n5\n-1 7\n0 8\n1 4\n2 -2\n3 5\n".as_bytes()).unwrap();

    let mut acc = Accumulator::new();
    acc.add(&first);
    acc.add(&second);
    assert_eq!(acc.signal().indices(), &[-4, -3, -2, -1, 0, 1, 2, 3]);
    assert_eq!(acc.signal().values(), &[-2.0, 3.0, 0.0, 8.0, 8.0, 4.0, -2.0, 5.0]);

    acc.delay(1).unwrap();
    assert_eq!(acc.signal().first_index(), Some(-5));

    acc.fold().unwrap();
    assert_eq!(acc.signal().indices(), &[-2, -1, 0, 1, 2, 3, 4, 5]);
    assert_eq!(acc.signal().values(), &[5.0, -2.0, 4.0, 8.0, 8.0, 0.0, 3.0, -2.0]);

    acc.scale(0.5);
    assert_eq!(acc.signal().value_at(1), Some(4.0));

    acc.subtract(&second);
    assert_eq!(acc.len(), 8);
    assert_eq!(acc.signal().value_at(0), Some(-6.0));

    acc.reset();
    assert!(acc.is_empty());
    assert!(matches!(acc.fold(), Err(Error::EmptyState(_))));
}

#[test]
fn test_generated_signal_accumulates_with_file() {
    let wave = Sinusoid::new(Waveform::Cosine, 3.0, 0.0, 10.0, 0.0).unwrap();
    let mut acc = Accumulator::new();
    acc.add(&wave.signal(100));
    acc.add(&parse_signal("0\n0\n2\n0 1\n150 1\n".as_bytes()).unwrap());

    assert_eq!(acc.len(), 101);
    assert_eq!(acc.signal().value_at(0), Some(4.0));
    assert_eq!(acc.signal().value_at(99), Some(3.0));
    assert_eq!(acc.signal().value_at(150), Some(1.0));
}

#[test]
fn test_sub_nyquist_generation_rejected() {
    let result = Sinusoid::new(Waveform::Sine, 1.0, 600.0, 1000.0, 0.0);
    assert!(matches!(result, Err(Error::InvalidValue(_))));
}

#[test]
fn test_quantize_bits_report() {
    let acc = Accumulator::from(Signal::from_values(vec![-1.0, 0.0, 1.0, 3.0]));
    let q = acc.quantize(QuantizerSpec::Bits(2)).unwrap();

    assert_eq!(q.levels, 4);
    assert_eq!(q.bits, Some(2));
    assert_eq!(q.step, 1.0);
    assert_eq!(q.codes, vec![0, 1, 2, 3]);
    assert_eq!(q.reconstructed, vec![-0.5, 0.5, 1.5, 2.5]);
}

#[test]
fn test_fixed_convolution_values() {
    assert_eq!(convolve(&[1.0], &[5.0]).unwrap(), vec![5.0]);
    assert_eq!(convolve(&[1.0, 1.0], &[1.0, 1.0]).unwrap(), vec![1.0, 2.0, 1.0]);
}

#[test]
fn test_transform_errors() {
    assert!(matches!(convolve(&[], &[]), Err(Error::InvalidValue(_))));
    assert!(matches!(first_derivative(&[1.0]), Err(Error::InvalidValue(_))));
    assert!(matches!(second_derivative(&[1.0, 2.0]), Err(Error::InvalidValue(_))));
    assert!(matches!(moving_average(&[1.0], 2), Err(Error::InvalidValue(_))));
    assert!(matches!(dft(&[]), Err(Error::InvalidValue(_))));
}

#[test]
fn test_spectrum_of_sampled_cosine() {
    // 8 samples of a cosine at one eighth of the sampling rate: energy in bins 1 and 7
    let wave = Sinusoid::new(Waveform::Cosine, 1.0, 100.0, 800.0, 0.0).unwrap();
    let spectrum = dft(wave.signal(8).values()).unwrap();
    let magnitudes = spectrum.magnitudes();
    let frequencies = spectrum.frequencies(800.0).unwrap();

    assert!((magnitudes[1] - 4.0).abs() < 1e-9);
    assert!((magnitudes[7] - 4.0).abs() < 1e-9);
    assert!((frequencies[1] - 100.0).abs() < 1e-12);
    for k in [0, 2, 3, 4, 5, 6] {
        assert!(magnitudes[k] < 1e-9, "bin {k} should be empty");
    }
}

//! End-to-end tests for the conversion pipeline through the library API.
//!
//! PNG inputs are synthesized with the `png` encoder and written to a
//! temporary directory, then pushed through both conversions.

use std::path::Path;

use foo_ascii::ascii::{render, target_dimensions, DENSITY_CHARSET};
use foo_ascii::convert::{self, ConvertOptions, Mode};
use foo_ascii::image::{luma, read_raw_gray, write_raw_gray, LuminanceImage};
use png::{BitDepth, ColorType, Encoder};
use tempfile::TempDir;

/// Write a PNG with the given format to `path`.
fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    color: ColorType,
    data: &[u8],
    palette: Option<(&[u8], &[u8])>,
) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color);
    encoder.set_depth(BitDepth::Eight);
    if let Some((plte, trns)) = palette {
        encoder.set_palette(plte.to_vec());
        encoder.set_trns(trns.to_vec());
    }
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
}

/// Split an ASCII art file into its header dimensions and body lines.
fn parse_art(text: &str) -> ((u32, u32), Vec<&str>) {
    let (header, body) = text.split_once('\n').expect("header line");
    let mut dims = header.split(' ').map(|v| v.parse::<u32>().unwrap());
    let dims = (dims.next().unwrap(), dims.next().unwrap());
    let lines: Vec<&str> = body.split_terminator('\n').collect();
    assert!(body.is_empty() || body.ends_with('\n'));
    (dims, lines)
}

#[test]
fn test_palette_png_with_transparency_keeps_color() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("palette.png");
    let output = dir.path().join("palette.foo");

    let plte: [u8; 6] = [200, 100, 50, 10, 20, 30];
    let trns: [u8; 2] = [0, 255];
    write_png(&input, 2, 1, ColorType::Indexed, &[0, 1], Some((&plte[..], &trns[..])));

    convert::run(Mode::PngToRawGray, &input, &output, ConvertOptions::default()).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    let mut expected = b"2 1\n".to_vec();
    expected.push(luma(200, 100, 50));
    expected.push(luma(10, 20, 30));
    assert_eq!(bytes, expected);
    assert_ne!(bytes[4], 0);
}

#[test]
fn test_png_to_ascii_via_raw_gray() {
    let dir = TempDir::new().unwrap();
    let png_path = dir.path().join("gradient.png");
    let raw_path = dir.path().join("gradient.foo");
    let art_path = dir.path().join("gradient.foo2");

    let (width, height) = (32u32, 16u32);
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _y in 0..height {
        for x in 0..width {
            let v = (x * 8) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    write_png(&png_path, width, height, ColorType::Rgb, &data, None);

    convert::run(Mode::PngToRawGray, &png_path, &raw_path, ConvertOptions::default()).unwrap();
    convert::run(Mode::RawGrayToAscii, &raw_path, &art_path, ConvertOptions::default()).unwrap();

    let raw = read_raw_gray(std::fs::read(&raw_path).unwrap().as_slice()).unwrap();
    assert_eq!((raw.width(), raw.height()), (width, height));

    let text = std::fs::read_to_string(&art_path).unwrap();
    let ((cw, ch), lines) = parse_art(&text);
    assert_eq!((cw, ch), (16, 8));
    assert_eq!(lines.len(), 8);

    // Dark on the left, dense on the right.
    for line in lines {
        assert_eq!(line.chars().count(), 16);
        assert_eq!(line.chars().next(), Some('.'));
        let last = line.chars().last().unwrap();
        let pos = DENSITY_CHARSET.iter().position(|&c| c == last).unwrap();
        assert!(pos > DENSITY_CHARSET.len() / 2);
    }
}

#[test]
fn test_ascii_shape_for_many_sizes() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.foo");
    let output = dir.path().join("out.foo2");

    for &(w, h) in &[(2, 1), (4, 2), (5, 3), (9, 9), (17, 4), (3, 40), (64, 48), (101, 7)] {
        let samples: Vec<u8> = (0..w * h).map(|i| (i * 37 % 256) as u8).collect();
        let img = LuminanceImage::new(w, h, samples).unwrap();
        write_raw_gray(std::fs::File::create(&input).unwrap(), &img).unwrap();

        convert::run(Mode::RawGrayToAscii, &input, &output, ConvertOptions::default()).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        let ((cw, ch), lines) = parse_art(&text);
        assert_eq!((cw, ch), target_dimensions(w, h), "{}x{}", w, h);
        assert_eq!(cw, w / 2);
        assert_eq!(lines.len(), ch as usize, "{}x{}", w, h);
        for line in lines {
            assert_eq!(line.chars().count(), cw as usize);
            assert!(line.chars().all(|c| DENSITY_CHARSET.contains(&c)));
        }
    }
}

#[test]
fn test_scenario_two_identical_rows() {
    let img = LuminanceImage::new(4, 2, vec![0, 85, 170, 255, 0, 85, 170, 255]).unwrap();
    let art = render(&img);
    assert_eq!((art.width(), art.height()), (2, 1));
    assert_eq!(art.to_string(), "2 1\n.Q\n");
}

#[test]
fn test_raw_gray_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("round.foo");
    let samples: Vec<u8> = (0..=255).rev().collect();
    let img = LuminanceImage::new(16, 16, samples.clone()).unwrap();

    write_raw_gray(std::fs::File::create(&path).unwrap(), &img).unwrap();
    let back = read_raw_gray(std::io::BufReader::new(std::fs::File::open(&path).unwrap())).unwrap();

    assert_eq!((back.width(), back.height()), (16, 16));
    assert_eq!(back.samples(), samples.as_slice());
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    use crate::grid_scan::common::error::ScanError;
    use crate::grid_scan::raster::types::widen;
    use crate::grid_scan::raster::{GrayRaster, ImageRasterReader, PixelSampler, RasterReader, gray_raster_from_image};

    fn encode_png(img: &DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("png encoding");
        bytes
    }

    #[test]
    fn test_new_rejects_mismatched_buffer() {
        let result = GrayRaster::new(4, 3, vec![0u16; 11]);

        assert!(matches!(
            result,
            Err(ScanError::InvalidRaster { width: 4, height: 3, len: 11 })
        ));
    }

    #[test]
    fn test_from_gray8_widens_samples() {
        let raster = GrayRaster::from_gray8(3, 1, &[0, 1, 255]).unwrap();

        assert_eq!(raster.data(), &[0, 257, 65535]);
        assert_eq!(widen(128), 0x8080);
    }

    #[test]
    fn test_sampler_reads_row_major() {
        let raster = GrayRaster::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(raster.intensity(0, 0), 1);
        assert_eq!(raster.intensity(2, 0), 3);
        assert_eq!(raster.intensity(1, 1), 5);
        assert_eq!(raster.intensity_at(3, 0), 0);
    }

    #[test]
    fn test_out_of_bounds_reads_black() {
        let raster = GrayRaster::filled(2, 2, u16::MAX);

        assert_eq!(raster.intensity_at(1, 1), u16::MAX);
        assert_eq!(raster.intensity_at(-1, 0), 0);
        assert_eq!(raster.intensity_at(0, 2), 0);
        assert_eq!(raster.intensity_at(2, 0), 0);
    }

    #[test]
    fn test_empty_raster() {
        assert!(GrayRaster::filled(0, 0, 0).is_empty());
        assert!(GrayRaster::filled(3, 0, 0).is_empty());
        assert!(!GrayRaster::filled(1, 1, 0).is_empty());
    }

    #[test]
    fn test_reader_decodes_gray_png() {
        let gray = GrayImage::from_fn(4, 2, |x, y| Luma([(x * 60 + y) as u8]));
        let bytes = encode_png(&DynamicImage::ImageLuma8(gray));

        let raster = ImageRasterReader.read_raster(&bytes).unwrap();

        assert_eq!((raster.width(), raster.height()), (4, 2));
        assert_eq!(raster.intensity(3, 1), widen(181));
        assert_eq!(raster.intensity(0, 0), 0);
    }

    #[test]
    fn test_reader_converts_color_png() {
        let mut rgb = RgbImage::from_pixel(2, 1, Rgb([255, 255, 255]));
        rgb.put_pixel(1, 0, Rgb([255, 0, 0]));
        let bytes = encode_png(&DynamicImage::ImageRgb8(rgb));

        let raster = ImageRasterReader.read_raster(&bytes).unwrap();

        assert_eq!(raster.intensity(0, 0), u16::MAX);
        assert_eq!(raster.intensity(1, 0), widen(76));
    }

    #[test]
    fn test_transparent_pixels_become_black() {
        let rgba = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 0]));

        let raster = gray_raster_from_image(&DynamicImage::ImageRgba8(rgba)).unwrap();

        assert_eq!(raster.intensity(0, 0), 0);
    }

    #[test]
    fn test_gray16_is_quantized_to_eight_bits() {
        let gray16: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_fn(2, 1, |x, _| Luma([if x == 0 { u16::MAX } else { 0x80ff }]));

        let raster = gray_raster_from_image(&DynamicImage::ImageLuma16(gray16)).unwrap();

        assert_eq!(raster.data(), &[u16::MAX, widen(128)]);
    }

    #[test]
    fn test_reader_rejects_garbage() {
        let result = ImageRasterReader.read_raster(b"definitely not an image");

        assert!(matches!(result, Err(ScanError::DecodeError(_))));
    }

    #[test]
    fn test_reader_rejects_non_png_formats() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([255, 255, 255])));
        let mut bmp = Vec::new();
        img.write_to(&mut Cursor::new(&mut bmp), ImageFormat::Bmp)
            .expect("bmp encoding");

        let result = ImageRasterReader.read_raster(&bmp);

        assert!(matches!(result, Err(ScanError::DecodeError(_))));
        assert!(ImageRasterReader.read_raster(&encode_png(&img)).is_ok());
    }
}

mod tests {
    use myrtio_led_strip::{PixelBuffer, PixelMode, Rgb, StripError};

    #[test]
    fn test_new_is_zeroed() {
        let buffer = PixelBuffer::<64>::new(12, PixelMode::Rgb).unwrap();
        assert_eq!(buffer.len(), 12);
        assert!(buffer.as_bytes().iter().all(|&b| b == 0));

        let buffer = PixelBuffer::<64>::new(16, PixelMode::Rgbw).unwrap();
        assert_eq!(buffer.len(), 16);
        assert_eq!(buffer.stride(), 4);
    }

    #[test]
    fn test_new_over_capacity() {
        let result = PixelBuffer::<8>::new(9, PixelMode::Rgb);
        assert_eq!(
            result.err(),
            Some(StripError::BufferCapacity {
                required: 9,
                capacity: 8
            })
        );
    }

    #[test]
    fn test_write_pixel_grb() {
        let mut buffer = PixelBuffer::<64>::new(6, PixelMode::Rgb).unwrap();
        buffer.write_pixel(3, Rgb::new(1, 2, 3));
        assert_eq!(buffer.as_bytes(), [0, 0, 0, 2, 1, 3]);
    }

    #[test]
    fn test_write_pixel_rgb_order() {
        let mut buffer = PixelBuffer::<64>::new(6, PixelMode::RgbRgb).unwrap();
        buffer.write_pixel(3, Rgb::new(1, 2, 3));
        assert_eq!(buffer.as_bytes(), [0, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_write_pixel_keeps_white() {
        let mut buffer = PixelBuffer::<64>::new(8, PixelMode::Rgbw).unwrap();
        buffer.as_mut_bytes()[7] = 9;
        buffer.write_pixel(4, Rgb::new(1, 2, 3));
        assert_eq!(buffer.as_bytes(), [0, 0, 0, 0, 2, 1, 3, 9]);
    }

    #[test]
    fn test_read_pixel() {
        let mut buffer = PixelBuffer::<64>::new(6, PixelMode::Rgb).unwrap();
        buffer.write_pixel(3, Rgb::new(10, 20, 30));
        assert_eq!(buffer.read_pixel(3), Some(Rgb::new(10, 20, 30)));
        assert_eq!(buffer.read_pixel(0), Some(Rgb::new(0, 0, 0)));
        assert_eq!(buffer.read_pixel(6), None);
    }

    #[test]
    fn test_fill() {
        let mut buffer = PixelBuffer::<64>::new(6, PixelMode::Rgb).unwrap();
        buffer.fill(7, 2, 5);
        assert_eq!(buffer.as_bytes(), [0, 0, 7, 7, 7, 0]);

        buffer.fill(1, 5, 2);
        assert_eq!(buffer.as_bytes(), [0, 0, 7, 7, 7, 0]);

        buffer.fill(4, 4, 100);
        assert_eq!(buffer.as_bytes(), [0, 0, 7, 7, 4, 4]);
    }
}

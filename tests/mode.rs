mod tests {
    use myrtio_led_strip::{ChannelOrder, PixelMode};

    #[test]
    fn test_mode_stride() {
        assert_eq!(PixelMode::Rgb.stride(), 3);
        assert_eq!(PixelMode::Rgbw.stride(), 4);
        assert_eq!(PixelMode::RgbRgb.stride(), 3);
    }

    #[test]
    fn test_mode_channel_order() {
        assert_eq!(PixelMode::Rgb.channel_order(), ChannelOrder::Grb);
        assert_eq!(PixelMode::Rgbw.channel_order(), ChannelOrder::Grb);
        assert_eq!(PixelMode::RgbRgb.channel_order(), ChannelOrder::Rgb);
    }

    #[test]
    fn test_mode_from_raw() {
        assert_eq!(PixelMode::from_raw(0), Some(PixelMode::Rgb));
        assert_eq!(PixelMode::from_raw(1), Some(PixelMode::Rgbw));
        assert_eq!(PixelMode::from_raw(2), Some(PixelMode::RgbRgb));
        assert_eq!(PixelMode::from_raw(3), None);
    }

    #[test]
    fn test_mode_parse_from_str() {
        assert_eq!(PixelMode::parse_from_str("rgb_rgb"), Some(PixelMode::RgbRgb));
        assert_eq!(PixelMode::Rgbw.as_str(), "rgbw");
        assert_eq!(PixelMode::parse_from_str("grb"), None);
    }
}

mod tests {
    use myrtio_led_strip::math8::scale8_floor;

    #[test]
    fn test_scale8_floor() {
        assert_eq!(scale8_floor(255, 128), 127);
        assert_eq!(scale8_floor(0, 128), 0);
        assert_eq!(scale8_floor(200, 255), 199);
        assert_eq!(scale8_floor(255, 255), 254);
        assert_eq!(scale8_floor(128, 0), 0);
    }
}

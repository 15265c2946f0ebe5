use tagbridge::constants::PN532_HSU_WAKEUP;
use tagbridge::protocol::codec::encode_command_frame;
use tagbridge::protocol::Command;

fn hex(s: &str) -> Vec<u8> {
    hex::decode(s.replace(' ', "")).unwrap()
}

#[test]
fn reader_commands_are_byte_exact() {
    assert_eq!(
        encode_command_frame(&Command::GetFirmwareVersion),
        hex("00 00 ff 02 fe d4 02 2a 00")
    );
    assert_eq!(
        encode_command_frame(&Command::sam_normal_mode()),
        hex("00 00 ff 05 fb d4 14 01 14 01 02 00")
    );
    assert_eq!(
        encode_command_frame(&Command::detect_type_a()),
        hex("00 00 ff 04 fc d4 4a 01 00 e1 00")
    );
    assert_eq!(
        encode_command_frame(&Command::mifare_read(1, 4)),
        hex("00 00 ff 05 fb d4 40 01 30 04 b7 00")
    );
}

#[test]
fn capability_container_read_frame() {
    assert_eq!(
        encode_command_frame(&Command::mifare_read(1, 3)),
        hex("00 00 ff 05 fb d4 40 01 30 03 b8 00")
    );
}

#[test]
fn wakeup_sequence_is_fixed() {
    assert_eq!(
        PN532_HSU_WAKEUP.to_vec(),
        hex("55 55 00 00 00 00 00 00 00 00 00 00 00 00 00 00 ff 03 fd d4 14 01 17 00")
    );
}

use crate::{Enumerated, Repr};

crate::define_enum! {
    /// Plain closed enum, no annotations.
    pub enum Weekday: u8 {
        Sunday = 0,
        Monday = 1,
        Tuesday = 2,
        Wednesday = 3,
        Thursday = 4,
        Friday = 5,
        Saturday = 6,
    }
}

crate::define_enum! {
    /// Signed repr with a display override on the negative member.
    pub enum Signal: i8 {
        Continue = 0,
        Stop = 1,
        Abort = -1 => "aborted",
    }
}

crate::define_enum! {
    /// Open constant set marked as flags.
    pub struct FileMode: u32 {
        NONE = 0,
        READ = 0x1,
        WRITE = 0x2,
        EXECUTE = 0x4 => "exec",
    }
    flags;
}

crate::define_enum! {
    /// Flags with a custom separator; trailer order reversed on purpose.
    pub struct Style: u16 {
        BOLD = 1,
        UNDERLINE = 2,
    }
    separator = " | ";
    flags;
}

crate::define_enum! {
    /// Enum shape takes the same trailers as the struct shape.
    pub enum Channel: u8 {
        Left = 1,
        Right = 2,
    }
    flags;
    separator = " + ";
}

crate::define_enum! {
    pub struct NoMembers: u8 {}
}

#[test]
fn enum_schema_preserves_declaration_order() {
    let names: Vec<_> = Weekday::SCHEMA.members.iter().map(|m| m.name).collect();
    assert_eq!(
        names,
        [
            "Sunday",
            "Monday",
            "Tuesday",
            "Wednesday",
            "Thursday",
            "Friday",
            "Saturday"
        ]
    );
    let values: Vec<_> = Weekday::SCHEMA.members.iter().map(|m| m.value).collect();
    assert_eq!(values, [0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn repr_and_defaults() {
    assert_eq!(Weekday::SCHEMA.repr, Repr::U8);
    assert_eq!(Signal::SCHEMA.repr, Repr::I8);
    assert_eq!(FileMode::SCHEMA.repr, Repr::U32);
    assert!(!Weekday::SCHEMA.flags);
    assert_eq!(Weekday::SCHEMA.separator, ", ");
}

#[test]
fn trailers_set_flags_and_separator() {
    assert!(FileMode::SCHEMA.flags);
    assert_eq!(FileMode::SCHEMA.separator, ", ");
    assert!(Style::SCHEMA.flags);
    assert_eq!(Style::SCHEMA.separator, " | ");
}

#[test]
fn enum_shape_accepts_both_trailers() {
    assert!(Channel::SCHEMA.flags);
    assert_eq!(Channel::SCHEMA.separator, " + ");
    assert_eq!(Channel::Left.bits() | Channel::Right.bits(), 3);
}

#[test]
fn negative_value_widens_by_bit_pattern() {
    let abort = &Signal::SCHEMA.members[2];
    assert_eq!(abort.value, 0xFF);
    assert_eq!(Signal::Abort.bits(), 0xFF);
}

#[test]
fn display_override_is_carried() {
    let abort = &Signal::SCHEMA.members[2];
    assert_eq!(abort.name, "Abort");
    assert_eq!(abort.display, Some("aborted"));
    assert_eq!(abort.display_name(), "aborted");

    let execute = &FileMode::SCHEMA.members[3];
    assert_eq!(execute.display_name(), "exec");
}

#[test]
fn enum_bits_zero_extend() {
    let week = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];
    for (index, day) in week.into_iter().enumerate() {
        assert_eq!(day.bits(), index as u64);
    }
    assert_eq!(Signal::Continue.bits(), 0);
    assert_eq!(Signal::Stop.bits(), 1);
}

#[test]
fn struct_shape_generates_consts_and_accepts_any_bits() {
    assert_eq!(FileMode::NONE.0, 0);
    assert_eq!(FileMode::READ.0, 0x1);
    assert_eq!(FileMode::WRITE.0, 0x2);
    assert_eq!(FileMode::EXECUTE.bits(), 0x4);
    assert_eq!(Style::BOLD.0 | Style::UNDERLINE.0, 3);
    assert_eq!(FileMode(0x6).bits(), 0x6);
    assert_eq!(FileMode(0xDEAD_BEEF).bits(), 0xDEAD_BEEF);
}

#[test]
fn empty_member_list_is_legal() {
    assert!(NoMembers::SCHEMA.members.is_empty());
    assert_eq!(NoMembers(9).bits(), 9);
}

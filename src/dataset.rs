/// The records processed when no other input is given.
pub const CAR_INFOS: [&str; 7] = [
    "2001-11-12 A000BC",
    "2004-03-10 E003EK",
    "2003-03-10 K009VO",
    "2005-03-10 K009VO",
    "2000-03-10 K009VO",
    "2000-03-15 K009VO",
    "2000-03-11 K009VO",
];

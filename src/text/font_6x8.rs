//! Glyph bitmaps of the built-in 6x8 font, codes 0x00 to 0x7F.
//!
//! Eight rows per glyph, one byte per row, the leftmost column in bit 5.

pub(super) static GLYPHS: [u8; 128 * 8] = [
    0x00, 0x1f, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1f, // 00 ctl
    0x00, 0x1f, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, // 01 ctl
    0x00, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, 0x1f, // 02 ctl
    0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x1f, // 03 ctl
    0x00, 0x08, 0x04, 0x02, 0x0f, 0x04, 0x02, 0x01, // 04 ctl
    0x00, 0x1f, 0x11, 0x1b, 0x15, 0x1b, 0x11, 0x1f, // 05 ctl
    0x00, 0x00, 0x01, 0x02, 0x14, 0x18, 0x10, 0x00, // 06 ctl
    0x00, 0x0e, 0x11, 0x11, 0x1f, 0x0a, 0x0a, 0x1b, // 07 ctl
    0x00, 0x04, 0x08, 0x1e, 0x09, 0x05, 0x01, 0x01, // 08 ctl
    0x00, 0x00, 0x04, 0x02, 0x1f, 0x02, 0x04, 0x00, // 09 ctl
    0x00, 0x1f, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x1f, // 0a ctl
    0x00, 0x00, 0x04, 0x04, 0x15, 0x0e, 0x04, 0x00, // 0b ctl
    0x00, 0x04, 0x15, 0x0e, 0x04, 0x15, 0x0e, 0x04, // 0c ctl
    0x00, 0x00, 0x04, 0x08, 0x1f, 0x08, 0x04, 0x00, // 0d ctl
    0x00, 0x0e, 0x11, 0x1b, 0x15, 0x1b, 0x11, 0x0e, // 0e ctl
    0x00, 0x0e, 0x11, 0x11, 0x15, 0x11, 0x11, 0x0e, // 0f ctl
    0x00, 0x1f, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x1f, // 10 ctl
    0x00, 0x0e, 0x15, 0x15, 0x17, 0x11, 0x11, 0x0e, // 11 ctl
    0x00, 0x0e, 0x11, 0x11, 0x17, 0x15, 0x15, 0x0e, // 12 ctl
    0x00, 0x0e, 0x11, 0x11, 0x1d, 0x15, 0x15, 0x0e, // 13 ctl
    0x00, 0x0e, 0x15, 0x15, 0x1d, 0x11, 0x11, 0x0e, // 14 ctl
    0x00, 0x00, 0x05, 0x02, 0x15, 0x18, 0x10, 0x00, // 15 ctl
    0x00, 0x0e, 0x0a, 0x0a, 0x0a, 0x0a, 0x0a, 0x1b, // 16 ctl
    0x00, 0x01, 0x01, 0x01, 0x1f, 0x01, 0x01, 0x01, // 17 ctl
    0x00, 0x1f, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x1f, // 18 ctl
    0x00, 0x04, 0x04, 0x0e, 0x0e, 0x04, 0x04, 0x04, // 19 ctl
    0x00, 0x0e, 0x11, 0x10, 0x08, 0x04, 0x00, 0x04, // 1a ctl
    0x00, 0x0e, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x0e, // 1b ctl
    0x00, 0x1f, 0x15, 0x15, 0x1d, 0x11, 0x11, 0x1f, // 1c ctl
    0x00, 0x1f, 0x11, 0x11, 0x1d, 0x15, 0x15, 0x1f, // 1d ctl
    0x00, 0x1f, 0x11, 0x11, 0x17, 0x15, 0x15, 0x1f, // 1e ctl
    0x00, 0x1f, 0x15, 0x15, 0x17, 0x11, 0x11, 0x1f, // 1f ctl
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 20 space
    0x00, 0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04, // 21 '!'
    0x00, 0x0a, 0x0a, 0x0a, 0x00, 0x00, 0x00, 0x00, // 22 '"'
    0x00, 0x0a, 0x0a, 0x1f, 0x0a, 0x1f, 0x0a, 0x0a, // 23 '#'
    0x00, 0x04, 0x0f, 0x14, 0x0e, 0x05, 0x1e, 0x04, // 24 '$'
    0x00, 0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03, // 25 '%'
    0x00, 0x08, 0x14, 0x14, 0x08, 0x15, 0x12, 0x0d, // 26 '&'
    0x00, 0x0c, 0x0c, 0x08, 0x10, 0x00, 0x00, 0x00, // 27 '\''
    0x00, 0x02, 0x04, 0x08, 0x08, 0x08, 0x04, 0x02, // 28 '('
    0x00, 0x08, 0x04, 0x02, 0x02, 0x02, 0x04, 0x08, // 29 ')'
    0x00, 0x04, 0x15, 0x0e, 0x1f, 0x0e, 0x15, 0x04, // 2a '*'
    0x00, 0x00, 0x04, 0x04, 0x1f, 0x04, 0x04, 0x00, // 2b '+'
    0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c, 0x08, 0x10, // 2c ','
    0x00, 0x00, 0x00, 0x00, 0x1f, 0x00, 0x00, 0x00, // 2d '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0c, 0x0c, // 2e '.'
    0x00, 0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00, // 2f '/'
    0x00, 0x0e, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0e, // 30 '0'
    0x00, 0x04, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x0e, // 31 '1'
    0x00, 0x0e, 0x11, 0x01, 0x0e, 0x10, 0x10, 0x1f, // 32 '2'
    0x00, 0x0e, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0e, // 33 '3'
    0x00, 0x02, 0x06, 0x0a, 0x12, 0x1f, 0x02, 0x02, // 34 '4'
    0x00, 0x1f, 0x10, 0x1e, 0x01, 0x01, 0x11, 0x0e, // 35 '5'
    0x00, 0x06, 0x08, 0x10, 0x1e, 0x11, 0x11, 0x0e, // 36 '6'
    0x00, 0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x10, // 37 '7'
    0x00, 0x0e, 0x11, 0x11, 0x0e, 0x11, 0x11, 0x0e, // 38 '8'
    0x00, 0x0e, 0x11, 0x11, 0x0f, 0x01, 0x02, 0x0c, // 39 '9'
    0x00, 0x00, 0x0c, 0x0c, 0x00, 0x0c, 0x0c, 0x00, // 3a ':'
    0x00, 0x0c, 0x0c, 0x00, 0x0c, 0x0c, 0x08, 0x10, // 3b ';'
    0x00, 0x02, 0x04, 0x08, 0x10, 0x08, 0x04, 0x02, // 3c '<'
    0x00, 0x00, 0x00, 0x1f, 0x00, 0x1f, 0x00, 0x00, // 3d '='
    0x00, 0x08, 0x04, 0x02, 0x01, 0x02, 0x04, 0x08, // 3e '>'
    0x00, 0x0e, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04, // 3f '?'
    0x00, 0x0e, 0x11, 0x01, 0x0d, 0x15, 0x15, 0x0e, // 40 '@'
    0x00, 0x04, 0x0a, 0x11, 0x11, 0x1f, 0x11, 0x11, // 41 'A'
    0x00, 0x1e, 0x09, 0x09, 0x0e, 0x09, 0x09, 0x1e, // 42 'B'
    0x00, 0x0e, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0e, // 43 'C'
    0x00, 0x1e, 0x09, 0x09, 0x09, 0x09, 0x09, 0x1e, // 44 'D'
    0x00, 0x1f, 0x10, 0x10, 0x1c, 0x10, 0x10, 0x1f, // 45 'E'
    0x00, 0x1f, 0x10, 0x10, 0x1c, 0x10, 0x10, 0x10, // 46 'F'
    0x00, 0x0f, 0x10, 0x10, 0x13, 0x11, 0x11, 0x0f, // 47 'G'
    0x00, 0x11, 0x11, 0x11, 0x1f, 0x11, 0x11, 0x11, // 48 'H'
    0x00, 0x0e, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e, // 49 'I'
    0x00, 0x01, 0x01, 0x01, 0x01, 0x01, 0x11, 0x0e, // 4a 'J'
    0x00, 0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11, // 4b 'K'
    0x00, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1f, // 4c 'L'
    0x00, 0x11, 0x1b, 0x15, 0x15, 0x11, 0x11, 0x11, // 4d 'M'
    0x00, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11, 0x11, // 4e 'N'
    0x00, 0x0e, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e, // 4f 'O'
    0x00, 0x1e, 0x11, 0x11, 0x1e, 0x10, 0x10, 0x10, // 50 'P'
    0x00, 0x0e, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0d, // 51 'Q'
    0x00, 0x1e, 0x11, 0x11, 0x1e, 0x14, 0x12, 0x11, // 52 'R'
    0x00, 0x0e, 0x11, 0x10, 0x0e, 0x01, 0x11, 0x0e, // 53 'S'
    0x00, 0x1f, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04, // 54 'T'
    0x00, 0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0e, // 55 'U'
    0x00, 0x11, 0x11, 0x11, 0x0a, 0x0a, 0x04, 0x04, // 56 'V'
    0x00, 0x11, 0x11, 0x11, 0x11, 0x15, 0x1b, 0x11, // 57 'W'
    0x00, 0x11, 0x11, 0x0a, 0x04, 0x0a, 0x11, 0x11, // 58 'X'
    0x00, 0x11, 0x11, 0x0a, 0x04, 0x04, 0x04, 0x04, // 59 'Y'
    0x00, 0x1f, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1f, // 5a 'Z'
    0x00, 0x04, 0x0e, 0x15, 0x04, 0x04, 0x04, 0x04, // 5b '['
    0x00, 0x04, 0x04, 0x04, 0x04, 0x15, 0x0e, 0x04, // 5c '\\'
    0x00, 0x00, 0x04, 0x08, 0x1f, 0x08, 0x04, 0x00, // 5d ']'
    0x00, 0x00, 0x04, 0x02, 0x1f, 0x02, 0x04, 0x00, // 5e '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1f, // 5f '_'
    0x00, 0x06, 0x06, 0x04, 0x02, 0x00, 0x00, 0x00, // 60 '`'
    0x00, 0x00, 0x00, 0x0e, 0x01, 0x0f, 0x11, 0x0f, // 61 'a'
    0x00, 0x10, 0x10, 0x16, 0x19, 0x11, 0x19, 0x16, // 62 'b'
    0x00, 0x00, 0x00, 0x0e, 0x11, 0x10, 0x11, 0x0e, // 63 'c'
    0x00, 0x01, 0x01, 0x0d, 0x13, 0x11, 0x13, 0x0d, // 64 'd'
    0x00, 0x00, 0x00, 0x0e, 0x11, 0x1f, 0x10, 0x0e, // 65 'e'
    0x00, 0x02, 0x05, 0x04, 0x0e, 0x04, 0x04, 0x04, // 66 'f'
    0x00, 0x0d, 0x13, 0x13, 0x0d, 0x01, 0x11, 0x0e, // 67 'g'
    0x00, 0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11, // 68 'h'
    0x00, 0x04, 0x00, 0x0c, 0x04, 0x04, 0x04, 0x0e, // 69 'i'
    0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x0e, // 6a 'j'
    0x00, 0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12, // 6b 'k'
    0x00, 0x0c, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0e, // 6c 'l'
    0x00, 0x00, 0x00, 0x1a, 0x15, 0x15, 0x15, 0x15, // 6d 'm'
    0x00, 0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11, // 6e 'n'
    0x00, 0x00, 0x00, 0x0e, 0x11, 0x11, 0x11, 0x0e, // 6f 'o'
    0x00, 0x16, 0x19, 0x11, 0x19, 0x16, 0x10, 0x10, // 70 'p'
    0x00, 0x0d, 0x13, 0x11, 0x13, 0x0d, 0x01, 0x01, // 71 'q'
    0x00, 0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10, // 72 'r'
    0x00, 0x00, 0x00, 0x0f, 0x10, 0x0e, 0x01, 0x1e, // 73 's'
    0x00, 0x04, 0x04, 0x1f, 0x04, 0x04, 0x05, 0x02, // 74 't'
    0x00, 0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0d, // 75 'u'
    0x00, 0x00, 0x00, 0x11, 0x11, 0x11, 0x0a, 0x04, // 76 'v'
    0x00, 0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0a, // 77 'w'
    0x00, 0x00, 0x00, 0x11, 0x0a, 0x04, 0x0a, 0x11, // 78 'x'
    0x00, 0x11, 0x11, 0x11, 0x0f, 0x01, 0x11, 0x0e, // 79 'y'
    0x00, 0x00, 0x00, 0x1f, 0x02, 0x04, 0x08, 0x1f, // 7a 'z'
    0x00, 0x02, 0x04, 0x04, 0x08, 0x04, 0x04, 0x02, // 7b '{'
    0x00, 0x04, 0x04, 0x04, 0x00, 0x04, 0x04, 0x04, // 7c '|'
    0x00, 0x08, 0x04, 0x04, 0x02, 0x04, 0x04, 0x08, // 7d '}'
    0x00, 0x08, 0x15, 0x02, 0x00, 0x00, 0x00, 0x00, // 7e '~'
    0x00, 0x0a, 0x15, 0x0a, 0x15, 0x0a, 0x15, 0x0a, // 7f DEL
];

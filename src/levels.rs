//! Built-in campaign content.
//!
//! The plans and symbol assignments ship with the engine so an embedder can
//! run the full game without authoring levels. Plan characters: `x` wall,
//! `!` lava, `@` player, `o` coin, `=` horizontal fireball, `v` vertical
//! fireball, `|` fire rain; everything else is empty space.

use std::collections::HashMap;

use crate::sim::Spawn;

/// The standard actor symbol table.
pub fn standard_symbols() -> HashMap<char, Spawn> {
    HashMap::from([
        ('@', Spawn::Player),
        ('o', Spawn::Coin),
        ('=', Spawn::HorizontalFireball),
        ('v', Spawn::VerticalFireball),
        ('|', Spawn::FireRain),
    ])
}

/// The campaign plans, in play order.
pub const CAMPAIGN: [&[&str]; 6] = [
    &[
        "               v    ",
        "      v          v  ",
        "   v             =  ",
        "         o          ",
        " @              x  o",
        "    xx  xx         x",
        "xx          xx      ",
        "!!!!!!!!!!!!!!!!!!!!",
    ],
    &[
        "                  v                 ",
        "    =                             o ",
        "                              o  xxx",
        "        o    =            o         ",
        " @    x                          ",
        "          o  xxx            o  xxx  ",
        "xxx      xxx        xxxxx           ",
        "!!!!!!!!!!!!!!!!!!!!!!!!!!!xxx!!!!!!",
    ],
    &[
        "     v                 ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "  o                 o  ",
        "  x               = x  ",
        "  x          o o    x  ",
        "  x  @   x   xxxxx  x  ",
        "  xxxxx             x  ",
        "      x!!!!!!!!!!!!!x  ",
        "      xxxxxxxxxxxxxxx  ",
        "                       ",
    ],
    &[
        "        |           |  ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "            o          ",
        "            x       x  ",
        "            =          ",
        "        x              ",
        "                |     x",
        "@ |   ox   x       o   ",
        "xxxxxxxxx!!!!!!xxxxxxxx",
        "                       ",
    ],
    &[
        "                       ",
        "                       ",
        "                       ",
        "    o                  ",
        "      x    |           ",
        "         x   x!!x= xx  ",
        " x                     ",
        "                      x",
        "                       ",
        "                   xxx ",
        "               xxx     ",
        "                       ",
        "             x         ",
        "       xxx  |          ",
        "                       ",
        " @   x                 ",
        "xxx                    ",
        "                       ",
    ],
    &[
        "      v         v      ",
        "                       ",
        "             o |       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "           xxxx        ",
        "             o         ",
        "           =           ",
        "     @        x        ",
        "     xxxx              ",
        "     |                 ",
        "         xxx           ",
        "                x      ",
        "             !         ",
        "                    x  ",
        "                       ",
        "    o       x    x     ",
        "    x      x       =   ",
        "          x   x        ",
        "         x             ",
        "      xx               ",
        "                       ",
    ],
];

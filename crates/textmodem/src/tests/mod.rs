mod decode_bad;
mod util;

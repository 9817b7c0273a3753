pub(crate) use self::vec_map::VecMap;

mod vec_map;

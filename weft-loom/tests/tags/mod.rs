mod decoration;
mod translatable;

pub mod a001_site;

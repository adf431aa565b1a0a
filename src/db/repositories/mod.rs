mod locations;
mod sections;

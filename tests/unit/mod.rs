mod full_model_generation;
